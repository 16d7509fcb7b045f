fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Central proto repo is at ../proto/ relative to sdk/
    let proto_root = "../proto";
    let service_proto = format!("{proto_root}/hinta/v1/costsource.proto");

    println!("cargo:rerun-if-changed={service_proto}");
    println!("cargo:rerun-if-changed={proto_root}/hinta/v1/types.proto");

    // Skip if proto source not found (CI uses pre-generated)
    if !std::path::Path::new(&service_proto).exists() {
        println!("cargo:warning=Proto source not found, using pre-generated file");
        return Ok(());
    }

    std::fs::create_dir_all("src/proto").ok();

    // Message types come from hinta-core; only the service plumbing is
    // generated here. Regeneration needs protoc on PATH; fall back to the
    // committed file when it is unavailable.
    let result = tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/proto")
        .extern_path(".hinta.v1", "::hinta_core::proto")
        .compile_protos(&[&service_proto], &[proto_root]);

    if let Err(e) = result {
        println!("cargo:warning=Skipping proto regeneration ({e}), using pre-generated file");
    }

    Ok(())
}
