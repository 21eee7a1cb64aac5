mod address_repository;
mod traits;

pub use address_repository::AddressRepositoryImpl;
pub use traits::AddressRepository;
