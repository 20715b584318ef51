pub mod entity;
pub mod repo;
pub mod tenant_repo;

pub use repo::Repository;
pub use tenant_repo::TenantRepository;
