mod channel;
mod helpers;
mod orders;
