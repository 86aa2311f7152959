//! Build script for generating Rust code from protobuf definitions.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tell Cargo to rerun if proto files change
    println!("cargo:rerun-if-changed=proto/");

    // Use a vendored `protoc` binary so the build does not depend on a
    // system-installed protocol buffer compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_build::configure()
        .build_server(true)
        // Client code is useful for integration tests
        .build_client(true)
        .compile_protos(&["proto/gym/v1/gym.proto"], &["proto/"])?;

    Ok(())
}
