pub mod client;
pub mod doctors;
pub mod drugs;

pub use doctors::DoctorAdvisor;
pub use drugs::DrugAdvisor;
