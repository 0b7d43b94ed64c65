/// Use cases module containing application business logic orchestration
mod check_dependencies;
mod run_audit;

pub use check_dependencies::CheckDependenciesUseCase;
pub use run_audit::RunAuditUseCase;
