pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod book_list_response;
        pub mod count_books_by_author_cmd;
        pub mod find_books_before_year_cmd;
        pub mod find_books_by_author_cmd;
        pub mod find_books_by_genre_cmd;
        pub mod get_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
        pub mod search_books_by_title_cmd;
        pub mod search_books_by_title_or_author_cmd;
        pub mod update_book_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
}

pub mod utils {
    pub mod ddb;
    pub mod logging;
}
