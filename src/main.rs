use anyhow::Result;
use clap::Parser;

use menuctl::console;
use menuctl::menu::{choose, Menu, MenuEntry};

#[derive(Parser, Debug)]
#[command(name = "menuctl", version, about = "Numbered text-menu command dispatcher")]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    let menu = Menu::new(vec![
        MenuEntry::new("Method 1", || println!("Method 1: Success!")),
        MenuEntry::new("Method 2", || println!("Method 2: Success!")),
        MenuEntry::new("Method 3", || println!("Method 3: Success!")),
    ]);

    let mut console = console::stdio();
    choose(&mut console, "MAIN MENU", &menu)
}
