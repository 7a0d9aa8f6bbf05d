// [apps/rbc-validator/src/main.rs]
fn main() {
    let status = rbc_validator_lib::run();
    std::process::exit(status as i32);
}
