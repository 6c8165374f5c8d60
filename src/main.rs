#[cfg(not(target_family = "wasm"))]
fn main() {
    solar_system_demo::run();
}

#[cfg(target_family = "wasm")]
#[allow(dead_code)]
fn main() {
    unreachable!();
}
