mod create;
mod delete;
mod helpers;
mod list;
mod update;
