mod aws;
mod env;

pub use aws::{AwsSecretsResolver, parse_secret_value};
pub use env::{EnvSecretResolver, secret_env_var};
