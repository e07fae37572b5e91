use colored::Colorize;

use crate::error::Result;
use crate::settings::{
    load_settings, new_user_id, save_settings, settings_file_exists, shellexpand_path,
};
use crate::storage::{FileStorage, Storage};

pub fn run(data_dir: Option<String>, name: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    let fresh = !settings_file_exists();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    if let Some(name) = name {
        settings.user_name = name;
    }
    if settings.user_id.is_empty() {
        settings.user_id = new_user_id();
    }

    let dir = std::path::PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;

    // Touch the storage keys so a fresh install starts from empty arrays.
    let mut storage = FileStorage::new(&dir);
    for key in ["expenses", "investments", "leaderboard"] {
        if storage.read(key)?.is_none() {
            storage.write(key, "[]")?;
        }
    }

    save_settings(&settings)?;

    if fresh {
        println!("{}", "Welcome to finwell.".bold());
    }
    println!("Data dir: {}", settings.data_dir);
    if !settings.user_name.is_empty() {
        println!("Name:     {}", settings.user_name);
    }
    println!("Run `finwell demo` to load sample data, or `finwell expense add` to start.");
    Ok(())
}
