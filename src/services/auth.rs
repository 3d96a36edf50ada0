use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

use crate::app_state::AppState;
use crate::domain::{Email, NewUser, Password, Role, User, UserStoreError};
use crate::errors::{LoginError, SignupError};

pub struct AuthService {}

impl AuthService {
    pub async fn signup(
        state: AppState,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<User, SignupError> {
        let password_hash = hash_password(password.as_ref())
            .await
            .map_err(|_| SignupError::InternalServerError)?;

        let user = NewUser::new(email.clone(), password_hash, role);
        let result = state.user_store.write().await.add_user(user).await;
        result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                SignupError::UserAlreadyExists(email.as_ref().to_string())
            }
            _ => SignupError::InternalServerError,
        })
    }

    pub async fn login(
        state: AppState,
        email: Email,
        password: Password,
    ) -> Result<User, LoginError> {
        let user = state
            .user_store
            .read()
            .await
            .get_user(&email)
            .await
            .map_err(|e| match e {
                // Not-found and bad-password collapse into one answer so the
                // response does not reveal which emails are registered.
                UserStoreError::UserNotFound => LoginError::IncorrectCredentials,
                _ => LoginError::InternalServerError,
            })?;

        let verified = verify_password(password.as_ref(), &user.password_hash)
            .await
            .map_err(|_| LoginError::InternalServerError)?;
        if !verified {
            return Err(LoginError::IncorrectCredentials);
        }

        Ok(user)
    }
}

// Argon2id work factors are CPU-bound, so both helpers run on the blocking
// pool rather than stalling the request executor.
pub async fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| UserStoreError::UnexpectedError)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| UserStoreError::UnexpectedError)?
            .to_string();
        Ok(password_hash)
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, UserStoreError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash).map_err(|_| UserStoreError::UnexpectedError)?;
        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}
