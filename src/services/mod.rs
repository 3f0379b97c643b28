pub mod trip_source;
