//! Basic usage example for deferfmt
//!
//! Run with: cargo run --example basic_usage

use deferfmt::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Error> {
    println!("deferfmt Basic Usage Example");
    println!("============================");

    // Example 1: literal text is copied as-is
    println!("\n1. Literal Text:");
    {
        let mut buf = [0u8; 64];
        let size = defer_fmt!(&mut buf, "boot complete");
        println!("  Encoded {} bytes: {}", size, hex(&buf[..size]));
    }

    // Example 2: compaction of bare %c / %s and small integers
    println!("\n2. Compaction:");
    {
        let mut buf = [0u8; 64];
        let size = defer_fmt!(&mut buf, "%c%s", 'A', "hi");
        println!("  \"%c%s\"  -> {}", hex(&buf[..size]));

        let size = defer_fmt!(&mut buf, "%d", 5);
        println!("  \"%d\" 5    -> {}", hex(&buf[..size]));

        let size = defer_fmt!(&mut buf, "%d", 1000);
        println!("  \"%d\" 1000 -> {}", hex(&buf[..size]));
    }

    // Example 3: a full log line, checked
    println!("\n3. Log Line:");
    {
        let fmt = "[%s] sensor %u read %.2f (%hd%%)";
        let args = [
            Arg::from("WARN"),
            Arg::from(3u32),
            Arg::from(98.25),
            Arg::from(-12i16),
        ];

        let mut buf = vec![0u8; encoded_len(fmt.as_bytes(), &args)];
        let size = try_encode(&mut buf, fmt.as_bytes(), &args)?;
        let text = format!("[{}] sensor {} read {:.2} ({}%)", "WARN", 3, 98.25, -12);

        println!("  Encoded {} bytes (text form is {} bytes)", size, text.len());
        println!("  {}", hex(&buf[..size]));
    }

    // Example 4: checked variant rejects bad calls
    println!("\n4. Error Handling:");
    {
        let mut buf = [0u8; 4];
        match try_defer_fmt!(&mut buf, "%d", 100_000) {
            Err(e) => println!("  Short buffer: {}", e),
            Ok(size) => println!("  Unexpected success: {} bytes", size),
        }
        match try_defer_fmt!(&mut buf, "%f", "not a number") {
            Err(e) => println!("  Wrong argument: {}", e),
            Ok(size) => println!("  Unexpected success: {} bytes", size),
        }
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
