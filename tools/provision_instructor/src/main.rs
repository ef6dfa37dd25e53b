use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use dotenvy::dotenv;
use rand::rngs::OsRng;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

fn is_dry_run() -> bool {
    !std::env::args().any(|a| a == "--apply")
}

fn usage() -> ! {
    eprintln!("usage: provision_instructor <username> <password> [--apply]");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let positional: Vec<String> = env::args()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect();
    let (username, password) = match positional.as_slice() {
        [u, p] if !u.trim().is_empty() && !p.is_empty() => (u.trim().to_string(), p.clone()),
        _ => usage(),
    };

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("password hashing failed: {}", e))?
        .to_string();

    if is_dry_run() {
        println!("[DRY RUN] Would set password for {}", username);
        println!("{}", hash);
        return Ok(());
    }

    let database_url = env::var("DATABASE_URL")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO instructors (username, password_hash)
        VALUES (?1, ?2)
        ON CONFLICT(username) DO UPDATE SET password_hash = excluded.password_hash
        "#,
    )
    .bind(&username)
    .bind(&hash)
    .execute(&pool)
    .await?;

    println!("Provisioned instructor {}", username);

    Ok(())
}
