pub mod d404_custom_reports;
