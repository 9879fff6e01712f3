pub mod valid_url;
