pub mod use_cases;

pub use use_cases::{
    Authenticated, ExistsError, ExistsUseCase, LoginError, LoginUseCase, RegisterError,
    RegisterUseCase, ResolveSessionUseCase, ResolvedSession,
};
