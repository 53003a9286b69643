mod membership;
mod role;
