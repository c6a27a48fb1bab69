pub mod session_alerts;

pub use session_alerts::{start_scheduler, AlertPolicy, SessionAlerts};

#[cfg(test)]
mod test;
