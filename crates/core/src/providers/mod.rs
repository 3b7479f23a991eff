pub mod traits;

// Backend collaborator implementations
pub mod graphql;
pub mod signin;
