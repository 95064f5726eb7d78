pub mod assessment_service;
pub mod candidate_service;
pub mod job_service;
pub mod network;
