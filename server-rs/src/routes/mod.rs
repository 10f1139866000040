pub mod health;
pub mod home;
pub mod invitations;
pub mod matches;
pub mod players;
pub mod rankings;
