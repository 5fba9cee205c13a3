/// Binary entrypoint for the `fizzbuzz` executable.
///
/// Keeps the binary thin — all logic lives in the `fizzbuzz_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    fizzbuzz_lib::run();
}
