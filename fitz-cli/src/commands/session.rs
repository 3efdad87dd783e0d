use anyhow::{Context as _, Result, bail};
use clap::Args;
use rpassword::prompt_password;
use shared::{ClientError, Session, forms::RegisterForm, models::User};

use super::{Context, prompt};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(long, short)]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub age: String,
    /// male, female or other
    #[arg(long)]
    pub gender: String,
    /// Height in centimetres
    #[arg(long)]
    pub height: String,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: String,
    /// Target weight in kilograms
    #[arg(long)]
    pub weight_goal: String,
    #[arg(long)]
    pub main_goal: String,
    /// beginner, intermediate or advanced
    #[arg(long)]
    pub fitness_level: String,
    #[arg(long)]
    pub preferred_workout_split: String,
}

#[derive(Args, Debug)]
pub struct MeArgs {
    /// Re-fetch the profile and check the stored token
    #[arg(long)]
    pub refresh: bool,
}

pub async fn login(context: &Context, args: LoginArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    if email.is_empty() {
        bail!("email must not be empty");
    }
    let password = prompt_password("Password: ")?;
    if password.trim().is_empty() {
        bail!("password must not be empty");
    }

    let mut store = context.session_store();
    let session = store
        .login(&context.client(), &email, &password)
        .await
        .context("login failed")?;
    print_session(session);
    println!("Session saved to {}", context.storage().path().display());
    Ok(())
}

pub async fn register(context: &Context, args: RegisterArgs) -> Result<()> {
    let password = prompt_password("Password: ")?;
    let form = RegisterForm {
        username: args.username,
        email: args.email,
        password,
        age: args.age,
        gender: args.gender,
        height: args.height,
        weight: args.weight,
        weight_goal: args.weight_goal,
        main_goal: args.main_goal,
        fitness_level: args.fitness_level,
        preferred_workout_split: args.preferred_workout_split,
    };

    let mut store = context.session_store();
    match store.register(&context.client(), &form).await {
        Ok(session) => {
            print_session(session);
            Ok(())
        }
        Err(ClientError::Validation(errors)) => {
            for (field, error) in errors.iter() {
                eprintln!("{field} {error}");
            }
            bail!("registration form is invalid")
        }
        Err(error) => Err(error).context("registration failed"),
    }
}

pub fn logout(context: &Context) {
    let mut store = context.session_store();
    let was_logged_in = store.is_authenticated();
    store.logout();
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
}

pub async fn me(context: &Context, args: MeArgs) -> Result<()> {
    let mut store = context.session_store();
    if !store.is_authenticated() {
        bail!("no active session; run `fitz session login` first");
    }

    if args.refresh {
        match store.revalidate(&context.client()).await {
            Ok(session) => print_session(session),
            Err(error) if error.is_unauthorized() => {
                bail!("session expired; run `fitz session login` to sign in again")
            }
            Err(error) => return Err(error).context("failed to refresh profile"),
        }
    } else if let Some(session) = store.session() {
        print_session(session);
    }
    Ok(())
}

fn print_session(session: &Session) {
    let user: &User = &session.user;
    println!("Logged in as {}", user.username);
    if !user.email.is_empty() {
        println!("email: {}", user.email);
    }
    if let Some(age) = user.age {
        println!("age: {age}");
    }
    if let Some(gender) = user.gender {
        println!("gender: {}", gender.label());
    }
    if let Some(height) = user.height {
        println!("height: {height} cm");
    }
    if let Some(weight) = user.weight {
        println!("weight: {weight} kg");
    }
    if let Some(goal) = user.weight_goal {
        println!("weight goal: {goal} kg");
    }
    if let Some(goal) = &user.main_goal {
        println!("main goal: {goal}");
    }
    if let Some(level) = user.fitness_level {
        println!("fitness level: {}", level.label());
    }
    if let Some(split) = &user.preferred_workout_split {
        println!("preferred split: {split}");
    }
}
