mod catalog;
mod toggle;
