//! Command runner port (interface).

/// Port for invoking the network-configuration executable.
///
/// Implementations never return an error: a failed launch, a non-zero exit
/// or a timeout is reported as output text starting with `"Error: "`.
/// Callers check the text with [`crate::domain::is_error_output`].
pub trait CommandRunnerPort: Send + Sync {
    /// Run the executable with the given arguments and return its standard output.
    fn run(&self, args: &[String]) -> impl std::future::Future<Output = String> + Send;
}
