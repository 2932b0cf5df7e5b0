use anyhow::Result;
use crux_core::typegen::TypeGen;
use esp_led_remote_core::{
    App, Event, StatusClass, StorageOperation, StorageOutput, TimerOperation, TimerOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register enums to ensure all variants are traced
    gen.register_type::<Event>()?;
    gen.register_type::<StatusClass>()?;
    gen.register_type::<StorageOperation>()?;
    gen.register_type::<StorageOutput>()?;
    gen.register_type::<TimerOperation>()?;
    gen.register_type::<TimerOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
