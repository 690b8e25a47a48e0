mod favorite;
mod flight;
mod flight_number;
mod user;
