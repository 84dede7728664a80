pub mod seasonal_settings;
