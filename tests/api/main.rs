mod admin;
mod helpers;
mod login;
mod logout;
mod signup;
mod tasks;
