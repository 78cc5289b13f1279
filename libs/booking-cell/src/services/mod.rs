pub mod dispatch;
pub mod flow;

pub use dispatch::BookingDispatcher;
pub use flow::BookingFlow;
