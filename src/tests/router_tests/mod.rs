mod api_tests;
mod auth_flow_tests;
mod booking_tests;
mod dashboard_tests;
mod guest_tests;
mod room_tests;
