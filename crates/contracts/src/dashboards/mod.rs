pub mod d100_resource_summary;
