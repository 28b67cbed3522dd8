fn main() {
    // Only run winres on Windows targets
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "octave-shift");
        res.set("FileDescription", "MIDI note map octave shifter");
        if let Err(e) = res.compile() {
            println!("cargo:warning=winres failed: {}", e);
        }
    }
}
