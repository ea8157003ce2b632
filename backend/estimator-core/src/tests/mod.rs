mod cascade;
mod catalog;
mod config;
mod logger;
