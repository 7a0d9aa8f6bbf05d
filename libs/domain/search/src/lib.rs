// [libs/domain/search/src/lib.rs]
//! Motor de búsqueda combinatoria basada en rango (RBC): enumera máscaras de
//! mismatch de popcount fijo en orden colex, las reparte entre workers por
//! rango de índice, y las valida contra un primitivo criptográfico conectable.

#![deny(missing_docs)]

pub mod driver;
pub mod errors;
pub mod perm_iterator;
pub mod rank_partitioner;
pub mod validator;
pub mod worker;

/// Re-exportaciones de uso frecuente para consumidores de este crate.
pub mod prelude {
    pub use crate::driver::{run_search, SearchConfig, SearchStats, SearchVerdict};
    pub use crate::errors::SearchError;
    pub use crate::perm_iterator::{PermIterator, PermStep};
    pub use crate::rank_partitioner::{partition, PartitionRange};
    pub use crate::validator::{ValidatorFactory, ValidatorIface};
    pub use crate::worker::{run_worker, FoundFlag, WorkerInputs, WorkerOutcome};
}
