pub mod ip_filter;
