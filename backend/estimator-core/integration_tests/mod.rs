mod helpers;
mod submission;
