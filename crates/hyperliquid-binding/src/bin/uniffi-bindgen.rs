/*
[INPUT]:  Compiled cdylib and uniffi.toml
[OUTPUT]: Kotlin/Swift/Python bindings
[POS]:    Tooling - binding generator entry point
[UPDATE]: When bumping the uniffi version
*/

fn main() {
    uniffi::uniffi_bindgen_main()
}
