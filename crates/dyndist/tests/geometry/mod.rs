mod dynamic_point_circle3;
mod point_circle3;
mod point_plane_segment;
