pub mod flight_state;
pub mod landing;

#[cfg(test)]
mod proptest_flight;
