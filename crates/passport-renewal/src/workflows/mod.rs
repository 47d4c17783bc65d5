pub mod passport_renewal;
