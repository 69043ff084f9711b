pub mod forecast;
pub mod geocode;
pub mod geoip;
pub mod resolver;
pub mod reverse;
