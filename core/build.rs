fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Central proto repo is at ../proto/ relative to core/
    let proto_root = "../proto";
    let types_proto = format!("{proto_root}/hinta/v1/types.proto");

    println!("cargo:rerun-if-changed={types_proto}");

    // Skip if proto source not found (CI uses pre-generated)
    if !std::path::Path::new(&types_proto).exists() {
        println!("cargo:warning=Proto source not found, using pre-generated file");
        return Ok(());
    }

    std::fs::create_dir_all("src/proto").ok();

    let mut config = prost_build::Config::new();
    config
        .out_dir("src/proto")
        .type_attribute(
            ".hinta.v1",
            "#[derive(serde::Serialize, serde::Deserialize)]",
        );

    // Regeneration needs protoc on PATH; fall back to the committed file
    // when it is unavailable.
    if let Err(e) = config.compile_protos(&[&types_proto], &[proto_root]) {
        println!("cargo:warning=Skipping proto regeneration ({e}), using pre-generated file");
    }

    Ok(())
}
