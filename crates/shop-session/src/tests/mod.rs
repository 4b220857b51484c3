mod fake_api;
mod persist;
mod session;
