pub mod periodic_gradient;
