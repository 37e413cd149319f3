pub mod order_reader;
pub mod report_writer;
