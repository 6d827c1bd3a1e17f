pub mod u501_content_manager;
