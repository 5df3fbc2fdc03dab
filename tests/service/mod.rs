mod character;
mod director;
mod member_tracking;
