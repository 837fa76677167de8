pub mod top_header;
