pub mod construction;
