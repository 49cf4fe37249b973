mod blog;
mod member;
mod project;
