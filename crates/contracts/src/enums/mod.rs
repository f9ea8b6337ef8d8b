pub mod item_category;
