pub mod not_found_view;
