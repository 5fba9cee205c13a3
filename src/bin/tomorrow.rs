/// Binary entrypoint for the `tomorrow` executable.
fn main() {
    fizzbuzz_lib::tomorrow::run();
}
